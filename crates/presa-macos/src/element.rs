use std::ffi::c_void;
use std::ptr;

use accessibility_sys::{
    AXError, AXUIElementCopyAttributeValue, AXUIElementCopyElementAtPosition,
    AXUIElementCreateSystemWide, AXUIElementRef, AXUIElementSetAttributeValue, AXValueCreate,
    AXValueGetValue, AXValueRef, kAXDialogSubrole, kAXErrorAPIDisabled,
    kAXErrorAttributeUnsupported, kAXErrorInvalidUIElement, kAXErrorNoValue,
    kAXErrorNotImplemented, kAXErrorSuccess, kAXParentAttribute, kAXPositionAttribute,
    kAXRoleAttribute, kAXSubroleAttribute, kAXSystemDialogSubrole, kAXValueTypeCGPoint,
    kAXWindowAttribute, kAXWindowRole,
};
use core_foundation::base::{CFRelease, CFRetain, CFTypeRef, TCFType};
use core_foundation::string::{CFString, CFStringRef};
use core_graphics::geometry::CGPoint;

use presa_core::{AccessError, AccessResult, ElementTree, Point, Role, Subrole, UiElement};

use crate::screen;

/// The sheet subrole string. Compared literally; sheets report it even
/// though no named constant covers it in the AX headers we bind.
const SHEET_SUBROLE: &str = "AXSheet";

/// An element of the macOS accessibility tree, wrapping an
/// `AXUIElementRef`.
///
/// The ref is an opaque token the window server resolves on every call;
/// holding one implies no ownership of the underlying window, and any
/// query can fail once the window goes away. The wrapper owns one
/// CoreFoundation retain.
pub struct AxElement(AXUIElementRef);

impl AxElement {
    /// Takes ownership of a +1 retained element (CF create rule).
    ///
    /// # Safety
    /// `raw` must be a valid `AXUIElementRef` the caller owns a retain
    /// on; this wrapper will release it on drop.
    unsafe fn from_create(raw: AXUIElementRef) -> Self {
        Self(raw)
    }

    /// Copies an attribute value, transferring ownership to the caller.
    fn copy_attribute(&self, name: &'static str) -> AccessResult<CFTypeRef> {
        let attribute = CFString::from_static_string(name);
        let mut value: CFTypeRef = ptr::null();
        // SAFETY: self.0 is valid for the lifetime of self and the out
        // pointer refers to a live local. On success the returned value
        // is owned by us (create rule).
        let err = unsafe {
            AXUIElementCopyAttributeValue(self.0, attribute.as_concrete_TypeRef(), &mut value)
        };
        if err == kAXErrorSuccess && !value.is_null() {
            Ok(value)
        } else {
            Err(map_error(err))
        }
    }

    /// Copies a string attribute (role, subrole).
    fn copy_string(&self, name: &'static str) -> AccessResult<String> {
        let value = self.copy_attribute(name)?;
        // SAFETY: role and subrole attributes are CFStrings; we own the
        // value, so wrap under the create rule to release it on drop.
        let string = unsafe { CFString::wrap_under_create_rule(value as CFStringRef) };
        Ok(string.to_string())
    }

    /// Copies an attribute that holds another element (parent, window).
    fn copy_element(&self, name: &'static str) -> AccessResult<AxElement> {
        let value = self.copy_attribute(name)?;
        // SAFETY: these attributes hold AXUIElements and we own the
        // returned retain.
        Ok(unsafe { Self::from_create(value as AXUIElementRef) })
    }
}

impl Clone for AxElement {
    fn clone(&self) -> Self {
        // SAFETY: self.0 is valid; CFRetain gives the clone its own
        // retain to release on drop.
        unsafe { CFRetain(self.0 as CFTypeRef) };
        Self(self.0)
    }
}

impl Drop for AxElement {
    fn drop(&mut self) {
        // SAFETY: we own exactly one retain on self.0.
        unsafe { CFRelease(self.0 as CFTypeRef) };
    }
}

impl UiElement for AxElement {
    fn role(&self) -> AccessResult<Role> {
        let role = self.copy_string(kAXRoleAttribute)?;
        Ok(if role == kAXWindowRole {
            Role::Window
        } else {
            Role::Other
        })
    }

    fn subrole(&self) -> AccessResult<Subrole> {
        let subrole = self.copy_string(kAXSubroleAttribute)?;
        Ok(if subrole == kAXDialogSubrole {
            Subrole::Dialog
        } else if subrole == kAXSystemDialogSubrole {
            Subrole::SystemDialog
        } else if subrole == SHEET_SUBROLE {
            Subrole::Sheet
        } else if subrole == "AXStandardWindow" {
            Subrole::Standard
        } else {
            Subrole::Other
        })
    }

    fn owner_window(&self) -> AccessResult<AxElement> {
        self.copy_element(kAXWindowAttribute)
    }

    fn parent(&self) -> AccessResult<AxElement> {
        self.copy_element(kAXParentAttribute)
    }

    fn origin(&self) -> AccessResult<Point> {
        let value = self.copy_attribute(kAXPositionAttribute)?;
        let mut origin = CGPoint::new(0.0, 0.0);
        // SAFETY: the position attribute holds an AXValue of CGPoint
        // type; the out pointer refers to a live local.
        let ok = unsafe {
            AXValueGetValue(
                value as AXValueRef,
                kAXValueTypeCGPoint,
                &mut origin as *mut CGPoint as *mut c_void,
            )
        };
        // SAFETY: we own the copied value.
        unsafe { CFRelease(value) };
        if ok {
            Ok(Point::new(origin.x, origin.y))
        } else {
            Err(AccessError::Unsupported)
        }
    }

    fn set_origin(&self, origin: Point) -> AccessResult<()> {
        let target = CGPoint::new(origin.x, origin.y);
        // SAFETY: the value pointer refers to a live local CGPoint.
        let value = unsafe { AXValueCreate(kAXValueTypeCGPoint, &target as *const CGPoint as *const c_void) };
        if value.is_null() {
            return Err(AccessError::Unsupported);
        }
        let attribute = CFString::from_static_string(kAXPositionAttribute);
        // SAFETY: element, attribute, and value are all valid; the write
        // does not consume the value, which we release afterwards.
        let err = unsafe {
            AXUIElementSetAttributeValue(self.0, attribute.as_concrete_TypeRef(), value as CFTypeRef)
        };
        // SAFETY: we own the created AXValue.
        unsafe { CFRelease(value as CFTypeRef) };
        if err == kAXErrorSuccess {
            Ok(())
        } else {
            Err(map_error(err))
        }
    }
}

/// The system-wide accessibility tree.
pub struct SystemTree(AxElement);

impl SystemTree {
    pub fn new() -> Self {
        // SAFETY: AXUIElementCreateSystemWide returns a +1 retained
        // element we take ownership of.
        Self(unsafe { AxElement::from_create(AXUIElementCreateSystemWide()) })
    }
}

impl Default for SystemTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree for SystemTree {
    type Element = AxElement;

    /// Hit-tests the tree at a point in the engine's bottom-left-origin
    /// pointer space. The accessibility interface expects top-left
    /// coordinates, so the point is flipped first.
    fn element_at(&self, point: Point) -> AccessResult<AxElement> {
        let ax_point = screen::flip_y(point);
        let mut element: AXUIElementRef = ptr::null_mut();
        // SAFETY: the system-wide element is valid and the out pointer
        // refers to a live local; on success we own the result.
        let err = unsafe {
            AXUIElementCopyElementAtPosition(
                (self.0).0,
                ax_point.x as f32,
                ax_point.y as f32,
                &mut element,
            )
        };
        if err == kAXErrorSuccess && !element.is_null() {
            // SAFETY: ownership transferred by the copy call.
            Ok(unsafe { AxElement::from_create(element) })
        } else {
            Err(map_error(err))
        }
    }
}

/// Maps AX error codes onto the engine's failure taxonomy.
fn map_error(err: AXError) -> AccessError {
    if err == kAXErrorAPIDisabled {
        AccessError::PermissionDenied
    } else if err == kAXErrorInvalidUIElement {
        AccessError::Stale
    } else if err == kAXErrorAttributeUnsupported
        || err == kAXErrorNoValue
        || err == kAXErrorNotImplemented
    {
        AccessError::Unsupported
    } else {
        AccessError::NotFound
    }
}

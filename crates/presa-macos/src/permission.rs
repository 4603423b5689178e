use accessibility_sys::{
    AXIsProcessTrusted, AXIsProcessTrustedWithOptions, kAXTrustedCheckOptionPrompt,
};
use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::CFString;

/// Whether this process holds accessibility automation rights.
///
/// Checked once at startup. Without trust every locate/access call fails
/// and drags simply never start; the engine does not block on the
/// answer.
pub fn is_trusted() -> bool {
    // SAFETY: simple query with no arguments.
    unsafe { AXIsProcessTrusted() }
}

/// Asks the system to show the accessibility permission prompt.
///
/// Returns the current trust state; granting takes effect only after
/// the user acts on the system dialog (and usually a restart).
pub fn request_trust() -> bool {
    let key = CFString::from_static_string(kAXTrustedCheckOptionPrompt);
    let options =
        CFDictionary::from_CFType_pairs(&[(key.as_CFType(), CFBoolean::true_value().as_CFType())]);
    // SAFETY: the dictionary is a valid CFDictionary for the duration of
    // the call.
    unsafe { AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef()) }
}

//! Field addresses for nested errors
//!
//! As validation descends into a value, the path to the current position is
//! extended one segment at a time: `.key` for object fields and `[index]` for
//! array elements. The root has the empty path, and a key directly under the
//! root is written without a leading dot.
//!
//! ```
//! use sluice::path::{join_index, join_key};
//!
//! let users = join_key("", "users");
//! let second = join_index(&users, 1);
//! assert_eq!(join_key(&second, "email"), "users[1].email");
//! assert_eq!(join_key(&join_index("", 1), "email"), "[1].email");
//! ```

/// Path of `key` inside the object at `parent`.
pub fn join_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Path of element `index` inside the array at `parent`.
pub fn join_index(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

/// Returns `true` when `path` is `ancestor` itself or lies beneath it.
///
/// ```
/// use sluice::path::is_within;
///
/// assert!(is_within("profile.contact.email", "profile.contact"));
/// assert!(is_within("items[0]", "items"));
/// assert!(!is_within("profiles.name", "profile"));
/// assert!(is_within("anything", ""));
/// ```
pub fn is_within(path: &str, ancestor: &str) -> bool {
    if ancestor.is_empty() || path == ancestor {
        return true;
    }
    path.strip_prefix(ancestor)
        .map(|rest| rest.starts_with('.') || rest.starts_with('['))
        .unwrap_or(false)
}

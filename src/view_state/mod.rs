//! Browser signals (scroll, motion preference, section visibility) and the
//! presentation values derived from them.

pub mod derive;
pub mod motion;
pub mod scroll;
pub mod visibility;

pub use motion::use_prefers_reduced_motion;
pub use scroll::use_scroll_position;
pub use visibility::use_visible_sections;

/// Logs a failed listener (de)registration. Returns whether it went through.
pub(crate) fn check_listener<E>(result: Result<(), E>, action: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(_) => {
            log::warn!("could not {}", action);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_listener_reports_outcome() {
        assert!(check_listener::<()>(Ok(()), "attach listener"));
        assert!(!check_listener(Err("blocked"), "attach listener"));
    }
}

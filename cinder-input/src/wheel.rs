//! Wheel-delta normalization.
//!
//! Browsers disagree on both the unit and the sign of wheel deltas. This
//! table folds the raw readings into signed scroll ticks: positive means
//! scrolling down/away, one tick per notch on a clicky wheel.

use crate::agent::{AgentInfo, Browser, Os};

/// Normalize a raw wheel event into integer scroll ticks.
///
/// `detail` is the Firefox `DOMMouseScroll` reading, `wheel_delta` the
/// `wheelDelta` reading used everywhere else. The sub-unit fallback in the
/// Chrome branch handles touchpads, which report fine-grained deltas far
/// below one 120-unit notch.
pub fn scroll_ticks(agent: &AgentInfo, detail: f64, wheel_delta: f64) -> i32 {
    let delta = match agent.browser {
        Browser::Firefox => {
            if agent.os == Os::MacOs {
                detail
            } else {
                detail / 3.0
            }
        }
        Browser::Opera => {
            if agent.os == Os::Linux {
                -wheel_delta / 80.0
            } else {
                // on mac
                -wheel_delta / 40.0
            }
        }
        Browser::Chrome | Browser::Safari | Browser::InternetExplorer => {
            let mut delta = -wheel_delta / 120.0;
            if delta.abs() < 1.0 {
                if agent.os == Os::Windows {
                    delta = -wheel_delta;
                } else if agent.os == Os::MacOs {
                    delta = -wheel_delta / 3.0;
                }
            }
            delta
        }
        Browser::Unknown => 0.0,
    };
    delta as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(browser: Browser, os: Os) -> AgentInfo {
        AgentInfo { browser, os }
    }

    #[test]
    fn test_chrome_notch() {
        let a = agent(Browser::Chrome, Os::Linux);
        assert_eq!(scroll_ticks(&a, 0.0, -120.0), 1);
        assert_eq!(scroll_ticks(&a, 0.0, 120.0), -1);
        assert_eq!(scroll_ticks(&a, 0.0, -360.0), 3);
    }

    #[test]
    fn test_chrome_touchpad_fallback() {
        // Sub-notch delta on Windows falls back to the raw reading
        let a = agent(Browser::Chrome, Os::Windows);
        assert_eq!(scroll_ticks(&a, 0.0, -2.0), 2);
        // and on macOS to a third of it
        let a = agent(Browser::Chrome, Os::MacOs);
        assert_eq!(scroll_ticks(&a, 0.0, -9.0), 3);
    }

    #[test]
    fn test_firefox_detail() {
        let a = agent(Browser::Firefox, Os::Linux);
        assert_eq!(scroll_ticks(&a, 3.0, 0.0), 1);
        let a = agent(Browser::Firefox, Os::MacOs);
        assert_eq!(scroll_ticks(&a, 3.0, 0.0), 3);
    }

    #[test]
    fn test_opera_platform_scale() {
        let a = agent(Browser::Opera, Os::Linux);
        assert_eq!(scroll_ticks(&a, 0.0, -80.0), 1);
        let a = agent(Browser::Opera, Os::MacOs);
        assert_eq!(scroll_ticks(&a, 0.0, -80.0), 2);
    }

    #[test]
    fn test_unknown_browser_yields_nothing() {
        let a = agent(Browser::Unknown, Os::Linux);
        assert_eq!(scroll_ticks(&a, 3.0, -120.0), 0);
    }
}

//! Browser and OS identity, parsed once from the user-agent string.
//!
//! Only the wheel-delta normalization needs this; nothing else in the
//! engine branches on the platform.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Browser {
    Firefox,
    Chrome,
    Safari,
    Opera,
    InternetExplorer,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Os {
    Windows,
    MacOs,
    Linux,
    Unknown,
}

#[derive(Clone, Copy, Debug)]
pub struct AgentInfo {
    pub browser: Browser,
    pub os: Os,
}

impl AgentInfo {
    /// Parse a `navigator.userAgent` string.
    ///
    /// Order matters: Chrome's UA contains "safari", Opera's contains
    /// "chrome", and IE11 only identifies itself via "trident".
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();

        let browser = if ua.contains("opr/") || ua.contains("opera") {
            Browser::Opera
        } else if ua.contains("msie") || ua.contains("trident") {
            Browser::InternetExplorer
        } else if ua.contains("firefox") {
            Browser::Firefox
        } else if ua.contains("chrome") {
            Browser::Chrome
        } else if ua.contains("safari") {
            Browser::Safari
        } else {
            Browser::Unknown
        };

        let os = if ua.contains("windows") {
            Os::Windows
        } else if ua.contains("mac os") || ua.contains("macintosh") {
            Os::MacOs
        } else if ua.contains("linux") || ua.contains("x11") || ua.contains("android") {
            Os::Linux
        } else {
            Os::Unknown
        };

        AgentInfo { browser, os }
    }

    pub fn unknown() -> Self {
        AgentInfo {
            browser: Browser::Unknown,
            os: Os::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_WIN: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const FIREFOX_LINUX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
    const SAFARI_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                              AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15";
    const OPERA_LINUX: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                               (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 OPR/106.0.0.0";

    #[test]
    fn test_chrome_beats_safari_token() {
        let agent = AgentInfo::from_user_agent(CHROME_WIN);
        assert_eq!(agent.browser, Browser::Chrome);
        assert_eq!(agent.os, Os::Windows);
    }

    #[test]
    fn test_firefox_on_linux() {
        let agent = AgentInfo::from_user_agent(FIREFOX_LINUX);
        assert_eq!(agent.browser, Browser::Firefox);
        assert_eq!(agent.os, Os::Linux);
    }

    #[test]
    fn test_safari_on_mac() {
        let agent = AgentInfo::from_user_agent(SAFARI_MAC);
        assert_eq!(agent.browser, Browser::Safari);
        assert_eq!(agent.os, Os::MacOs);
    }

    #[test]
    fn test_opera_beats_chrome_token() {
        let agent = AgentInfo::from_user_agent(OPERA_LINUX);
        assert_eq!(agent.browser, Browser::Opera);
        assert_eq!(agent.os, Os::Linux);
    }

    #[test]
    fn test_unrecognized() {
        let agent = AgentInfo::from_user_agent("curl/8.0");
        assert_eq!(agent.browser, Browser::Unknown);
        assert_eq!(agent.os, Os::Unknown);
    }
}

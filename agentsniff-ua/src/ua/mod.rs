mod info;
pub use info::{Browser, DeviceKind, EngineKind, UserAgent};

mod section;
pub use section::{Section, SectionIter, sections, split_product};

mod os;
pub use os::OsInfo;

mod bot;
mod parse;
use parse::parse_http_user_agent_header;
mod platform;
pub use platform::normalize_os;

#[cfg(feature = "http")]
mod http;

// Adapters layer: concrete implementations of the host ports, used by the CLI and in tests.

pub mod localization;
pub mod routing;
pub mod settings;

pub use localization::InMemoryLocaleStore;
pub use routing::RouteTable;
pub use settings::InMemorySettingStore;

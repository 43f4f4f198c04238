//! Interactive builder state — the live configuration store with undo
//! history and reactive matrix recomputation, id-keyed registries over
//! audiences/creatives/copy variants, and the collaborator contracts
//! (asset store, draft persistence, autosave debounce).

pub mod assets;
pub mod autosave;
pub mod persistence;
pub mod registry;
pub mod store;

pub use assets::AssetStore;
pub use autosave::DebounceGate;
pub use persistence::{DraftStore, MemoryDraftStore};
pub use registry::RegistryOps;
pub use store::ConfigStore;

pub mod instance_slot;
pub mod ports;
pub mod use_cases;
pub mod voice_router;

pub use instance_slot::InstanceSlot;
pub use use_cases::*;
pub use voice_router::VoiceRouter;

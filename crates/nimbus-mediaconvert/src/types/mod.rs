//! MediaConvert shapes.
//!
//! The job settings tree is large; it is split by concern (inputs, output
//! groups, containers, video, audio, captions) and re-exported flat here.

mod audio;
mod captions;
mod container;
mod job;
mod output_group;
mod settings;
mod source;
mod video;

pub use audio::*;
pub use captions::*;
pub use container::*;
pub use job::*;
pub use output_group::*;
pub use settings::*;
pub use source::*;
pub use video::*;

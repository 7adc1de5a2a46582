pub mod bucket;
pub mod timeline;
pub mod trial;
pub mod window;

pub use bucket::{bucket_index, Bucket, BucketThresholds};
pub use timeline::{EventKind, TimelineEvent, TimelineLog};
pub use trial::{Outcome, Trial};
pub use window::SampleWindow;

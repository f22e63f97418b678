mod stream;
mod trial;

pub mod replicate;

pub use replicate::{Collect, Replicates, replicate, trials};
pub use stream::Stream;
pub use trial::{Shape, Shaped, Trial};

pub mod artist;
pub mod years;

pub use artist::Artist;
pub use years::ActiveYears;

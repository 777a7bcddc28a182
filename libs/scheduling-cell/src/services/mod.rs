pub mod availability;
pub mod booking;
pub mod conflict;
pub mod schedule;
pub mod waitlist;

pub use availability::*;
pub use booking::*;
pub use conflict::*;
pub use schedule::*;
pub use waitlist::*;

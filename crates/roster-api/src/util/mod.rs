pub mod file;
pub mod image;

#[cfg(not(test))]
pub use roster_core::util::get_uuid_v4;

#[cfg(test)]
use uuid::{Uuid, uuid};

#[cfg(test)]
pub fn get_uuid_v4() -> Uuid {
    uuid!("00000000-0000-0000-0000-000000000000")
}

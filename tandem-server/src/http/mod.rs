mod create_room;

pub use create_room::*;

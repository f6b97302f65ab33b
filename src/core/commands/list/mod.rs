// src/core/commands/list/mod.rs

// Internal helper module for token layouts shared between commands.
pub(crate) mod logic;
mod pushx;

// Public modules for each list command.
pub mod blmove;
pub mod blpop;
pub mod brpop;
pub mod brpoplpush;
pub mod lindex;
pub mod linsert;
pub mod llen;
pub mod lmove;
pub mod lpop;
pub mod lpos;
pub mod lpush;
pub mod lrange;
pub mod lrem;
pub mod lset;
pub mod ltrim;
pub mod rpop;
pub mod rpoplpush;
pub mod rpush;

// Re-export all command structs for easy access from the parent `commands` module.
pub use self::blmove::BLMove;
pub use self::blpop::BLPop;
pub use self::brpop::BRPop;
pub use self::brpoplpush::BRPopLPush;
pub use self::lindex::LIndex;
pub use self::linsert::{InsertPosition, LInsert};
pub use self::llen::LLen;
pub use self::lmove::{LMove, Side};
pub use self::lpop::LPop;
pub use self::lpos::LPos;
pub use self::lpush::LPush;
pub use self::lrange::LRange;
pub use self::lrem::LRem;
pub use self::lset::LSet;
pub use self::ltrim::LTrim;
pub use self::pushx::{LPushX, RPushX};
pub use self::rpop::RPop;
pub use self::rpoplpush::RPopLPush;
pub use self::rpush::RPush;

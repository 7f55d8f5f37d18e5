//! Ranked - lexicographically sortable rank keys.
//!
//! A rank is a string over `0-9A-Z` that encodes an item's position in a
//! list. A new rank can always be found between two existing ones, so items
//! can be inserted or moved without renumbering their neighbours. Ranks sort
//! correctly as plain strings once trailing zeros are trimmed, which is the
//! form every operation here returns.
//!
//! # Quick Start
//!
//! ```
//! use ranked::RankEngine;
//! use ranked::Ranker;
//!
//! let engine = RankEngine::new(10).unwrap();
//!
//! // Seed a list with evenly spread ranks
//! let ranks = engine.ranks(3);
//! assert_eq!(ranks, vec!["8R", "HI", "Q9"]);
//!
//! // Insert between two neighbours
//! let mid = engine.insert(&ranks[0], &ranks[1]);
//! assert!(engine.less(&ranks[0], &mid) && engine.less(&mid, &ranks[1]));
//!
//! // Move an item to the end
//! let last = engine.next(&ranks[2]).unwrap();
//! assert_eq!(last, "Q900000001");
//! ```
//!
//! # Modules
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | `alphabet`  | Digits, validation, canonical form              |
//! | `compare`   | Total order over ranks                          |
//! | `average`   | Exact digit-by-digit midpoint                   |
//! | `insert`    | A rank between two neighbours                   |
//! | `batch`     | Many evenly spread ranks by bisection           |
//! | `step`      | Successor and predecessor at a fixed precision  |
//! | `engine`    | `Ranker` trait and `RankEngine`                 |
//! | `key`       | `Rank`, an owned validated rank                 |

pub mod alphabet;
pub mod average;
pub mod batch;
pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod insert;
pub mod key;
pub mod step;

pub use alphabet::DIGITS;
pub use alphabet::RANK_MAX;
pub use alphabet::RANK_MIN;
pub use config::ConfigError;
pub use config::RankConfig;
pub use engine::RankEngine;
pub use engine::Ranker;
pub use error::RankError;
pub use error::Result;
pub use key::Rank;

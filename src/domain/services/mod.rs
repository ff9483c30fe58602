//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod output_naming;

//! # CLI Commands Module / CLI 命令模块
//!
//! This module contains the implementations of the Param Matrix CLI
//! subcommands.
//!
//! 此模块包含 Param Matrix CLI 子命令的实现。

pub mod bind;
pub mod check;
pub mod init;

//! 远程代码执行网关
//!
//! 将内部 (语言, 源码, stdin) 请求适配为 Piston 的
//! runtime 发现 + execute 协议。调用方只提供人类可读的语言标签，
//! 永远不接触 Piston 的 language/version 概念。

mod piston;

pub use piston::{PistonClient, Runtime};

//! Agent backends (spec §4.5). `mock` is the deterministic stub used by
//! tests and by `MockAgent`-backed fallback composition; `http` is the
//! shared request/retry plumbing; `provider_a`/`provider_b` are two
//! vendor-agnostic HTTP calling conventions (function-calling/schema mode
//! vs. plain JSON completion) rather than named vendor SDKs, which spec.md
//! scopes out as an external collaborator.

pub mod http;
pub mod mock;
pub mod provider_a;
pub mod provider_b;

//! Bridge subsystem — named remote endpoints over a byte transport.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      Bridge Stack                          │
//! │                                                            │
//! │  ┌───────────┐   ┌──────────┐   ┌───────────────────────┐  │
//! │  │ Transport │──▶│  Codec   │──▶│  FrameBridge          │  │
//! │  │ (trait)   │   │ (framing)│   │  → Registry → handler │  │
//! │  └───────────┘   └──────────┘   └───────────────────────┘  │
//! │       ▲                                    │               │
//! │       └──────────── Reply ◀────────────────┘               │
//! │                                                            │
//! │  Runtime: cooperative poll loop (edge-executor)            │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod bridge;
pub mod client;
pub mod codec;
pub mod message;
pub mod registry;
pub mod runtime;
pub mod transport;

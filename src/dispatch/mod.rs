//! Request dispatch.
//!
//! # Data Flow
//! ```text
//! caller builds OutgoingCall (call.rs)
//!     → dispatcher.rs injects the current token, bumps the loading gauge,
//!       arms the timeout guard, issues the transport exchange
//!     → transport.rs (reqwest under a cancellation token)
//!     → on settle: disarm, decrement, hide notification
//!         success → resolve with the response body
//!         failure → error.rs normalization → conditional error
//!                   notification → reject with NormalizedError
//! ```
//!
//! # Design Decisions
//! - One settle path, exactly once, for all of success, server error,
//!   network failure and guard-triggered abort
//! - No retries: a failed call is a single rejected future
//! - The transport is a trait seam so lifecycle tests run on a paused
//!   clock with a scripted transport instead of real sockets

pub mod call;
pub mod dispatcher;
pub mod error;
pub mod transport;

pub use call::OutgoingCall;
pub use dispatcher::RequestDispatcher;
pub use error::{normalize, CallFailure, NormalizedError};
pub use transport::{HttpTransport, Transport, TransportFailure, TransportReply, TransportRequest};

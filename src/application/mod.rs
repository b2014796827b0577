//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `ApprovalWorkflow` which acts as the primary entry
//! point for approving a pending demand: it submits the transfer through the
//! gateway port and resolves the outcome into the matching side effects.

pub mod workflow;

//! Form submission: the shared state machine, its component hook and the
//! three field sets.

pub mod contact;
pub mod controller;
pub mod hook;
pub mod newsletter;
pub mod whistleblow;

pub use controller::{Notice, NoticeVariant, SubmissionState};
pub use hook::{use_submission, UseSubmissionHandle};

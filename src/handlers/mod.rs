// One function per route. Each returns the finished response; cookies queued
// on the session are written by the router afterwards.
pub mod auth;
pub mod listing;
pub mod property;

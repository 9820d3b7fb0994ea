//! Security-focused tests
//!
//! sea-orm binds every value as a parameter; these tests make sure hostile
//! input is stored and matched as literal text.

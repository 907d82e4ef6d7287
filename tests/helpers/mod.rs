// ABOUTME: Test helper modules shared by the integration suites
// ABOUTME: HTTP request utilities for exercising axum routers in-process

#![allow(dead_code)]

pub mod axum_test;

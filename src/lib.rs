// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod addons;
pub mod blueprint;
pub mod cluster;
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod options;

#[cfg(test)]
mod test_utils;

// ABOUTME: Re-exports helper modules for stretchwell-cli
// ABOUTME: Provides access to output printing utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;

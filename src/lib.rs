/*
 * @file lib.rs
 * @brief SCAR library root
 * @author Kevin Thomas
 * @date 2025
 *
 * MIT License
 *
 * Copyright (c) 2025 Kevin Thomas
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! SCAR - an interactive cybersecurity-awareness chatbot.
//!
//! This library provides a console chatbot that:
//! - Greets the user concurrently by synthesized voice and ASCII banner
//! - Collects and validates the user's name
//! - Answers cybersecurity questions from a fixed keyword table
//!
//! # Example
//! ```no_run
//! use anyhow::Result;
//! use scar::assistant;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     assistant::run_chatbot().await
//! }
//! ```

pub mod assistant;
pub mod console;
pub mod name;
pub mod responder;
pub mod speech;

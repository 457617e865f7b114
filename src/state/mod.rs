/// State management module
/// 
/// This module handles all application state, including:
/// - The fixed animal catalog and its seed data (catalog.rs)
/// - Shared data structures (data.rs)
/// - Search, filter and detail-panel selection state (filter.rs)

pub mod catalog;
pub mod data;
pub mod filter;

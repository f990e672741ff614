//! Shared console icons.
//!
//! Each icon falls back to an ASCII tag on terminals without emoji support.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR] ");
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[WARN] ");

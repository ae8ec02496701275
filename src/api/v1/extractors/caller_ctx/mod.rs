/*!
 * Caller context extractor
 *
 * Responsibility:
 * - oauth middleware が書いた X-Caller-Id / X-Client-Id / X-Public を handler に渡す
 * - 型定義は types、axum 依存は core に分離する
 */

mod core;
mod types;

pub use self::core::CallerCtx;
pub use types::Caller;

/*
 * Responsibility
 * - middleware の公開インターフェース
 * - http: request id / trace / limit / timeout
 * - oauth: access_token の解決と identity ヘッダ付与
 */
pub mod http;
pub mod oauth;

/// Identity seen by a handler after the oauth middleware ran.
///
/// - `caller_id` / `client_id` are 0 when the request is anonymous
/// - `public` mirrors the advisory `X-Public` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub caller_id: i64,
    pub client_id: i64,
    pub public: bool,
}

impl Caller {
    pub fn is_authenticated(&self) -> bool {
        self.caller_id != 0
    }
}

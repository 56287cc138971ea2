use tracing_subscriber::EnvFilter;

/// 설정 파일을 읽기 전이나 설정 값이 잘못됐을 때 쓰는 수준.
pub const DEFAULT_LEVEL: &str = "info";

/// tracing 구독자를 설치한다. `RUST_LOG`가 있으면 설정값보다 우선한다.
/// 이미 설치되어 있으면 아무 것도 하지 않는다.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_installs_subscriber_once() {
        init("not a valid level [");
        assert!(tracing::dispatcher::has_been_set());
        // 두 번째 호출은 무시된다.
        init(DEFAULT_LEVEL);
        tracing::error!("still delivered");
    }
}

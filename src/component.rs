// Subsystem tags attached to every facade log record as `component=<tag>`.
//
// Logging calls accept any string; these six are the ones the stack agrees on.

pub const DEVICE: &str = "device";
pub const HOST: &str = "host";
pub const STACK: &str = "stack";
pub const HAL: &str = "hal";
pub const TRANSFER: &str = "transfer";
pub const ENDPOINT: &str = "endpoint";

pub const ALL: [&str; 6] = [DEVICE, HOST, STACK, HAL, TRANSFER, ENDPOINT];

/// Field key under which the tag is emitted.
pub const KEY: &str = "component";

pub fn is_known(tag: &str) -> bool {
    ALL.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        for tag in ALL {
            assert!(is_known(tag));
        }
        assert!(!is_known("Host"));
        assert!(!is_known(""));
    }
}

use anyhow::anyhow;

// Default multipart limits; the host application overrides them only through
// the environment.
const DEFAULT_MAX_FILE_SIZE_MB: u64 = 1;
const DEFAULT_MAX_REQUEST_SIZE_MB: u64 = 10;

pub struct UploadConfig {
    max_file_size_bytes: u64,
    max_request_size_bytes: u64,
}

impl UploadConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let max_file_size_mb = read_mb_var("UPLOAD_MAX_FILE_SIZE_MB", DEFAULT_MAX_FILE_SIZE_MB)?;
        let max_request_size_mb =
            read_mb_var("UPLOAD_MAX_REQUEST_SIZE_MB", DEFAULT_MAX_REQUEST_SIZE_MB)?;

        if max_file_size_mb > max_request_size_mb {
            return Err(anyhow!(
                "UPLOAD_MAX_FILE_SIZE_MB ({max_file_size_mb}) exceeds UPLOAD_MAX_REQUEST_SIZE_MB ({max_request_size_mb})"
            ));
        }

        Ok(UploadConfig {
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            max_request_size_bytes: max_request_size_mb * 1024 * 1024,
        })
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }

    pub fn max_request_size_bytes(&self) -> u64 {
        self.max_request_size_bytes
    }
}

fn read_mb_var(name: &'static str, default_mb: u64) -> anyhow::Result<u64> {
    match std::env::var(name) {
        Ok(raw) => parse_mb(name, &raw),
        Err(_) => Ok(default_mb),
    }
}

fn parse_mb(name: &str, raw: &str) -> anyhow::Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        anyhow!("Environment variable {name} must be a whole number of megabytes, got '{raw}'")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_standard_multipart_limits() {
        let config = UploadConfig::from_env().unwrap();
        assert_eq!(config.max_file_size_bytes(), 1024 * 1024);
        assert_eq!(config.max_request_size_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_parse_mb() {
        assert_eq!(parse_mb("UPLOAD_MAX_FILE_SIZE_MB", "25").unwrap(), 25);
        assert_eq!(parse_mb("UPLOAD_MAX_FILE_SIZE_MB", " 5 ").unwrap(), 5);
        assert!(parse_mb("UPLOAD_MAX_FILE_SIZE_MB", "10MB").is_err());
        assert!(parse_mb("UPLOAD_MAX_FILE_SIZE_MB", "-1").is_err());
    }
}

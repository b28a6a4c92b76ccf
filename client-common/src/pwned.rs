use std::io::{BufRead, Cursor};

use eyre::{eyre, WrapErr};
use reqwest::StatusCode;
use sha1::{Digest, Sha1};

const RANGE_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Advisory breach lookup: asks the Pwned Passwords range API how many
/// times this password appears in known breaches. Only the first five hex
/// characters of the SHA-1 leave the machine (k-anonymity). This never
/// gates validation; callers surface the count as a warning at most.
pub async fn breach_count(password: &str) -> eyre::Result<u64> {
    let hash = data_encoding::HEXLOWER.encode(Sha1::digest(password.as_bytes()).as_slice());
    let (prefix, suffix) = hash.split_at(5);

    let resp = reqwest::Client::new()
        .get(format!("{}{}", RANGE_URL, prefix))
        .header("Add-Padding", "true")
        .send()
        .await?;

    match resp.status() {
        StatusCode::OK => {
            let body = Cursor::new(resp.text().await?);
            for line in body.lines() {
                let line = line.wrap_err("failed to parse range response")?.to_lowercase();
                let mut parts = line.split(':');
                let line_suffix = parts
                    .next()
                    .ok_or_else(|| eyre!("failed to parse range response"))?;
                if line_suffix == suffix {
                    let count = parts
                        .next()
                        .ok_or_else(|| eyre!("failed to parse range response"))?;
                    return count.trim().parse::<u64>().wrap_err("failed to parse range response");
                }
            }
            Ok(0)
        }
        status => Err(eyre!("range API responded with status code {}", status)),
    }
}

//! Health command - check that the loan service is up

use anyhow::{Context, Result};

use crate::style::*;
use loan_wizard::LoanApiClient;

pub async fn run(client: &LoanApiClient) -> Result<()> {
    print_header("Service Health");
    print_key_value("URL", client.base_url());

    let health = client
        .health()
        .await
        .with_context(|| format!("Loan service at {} is unreachable", client.base_url()))?;

    print_key_value("Status", &health.status);
    if !health.service.is_empty() {
        print_key_value("Service", &health.service);
    }
    if !health.version.is_empty() {
        print_key_value("Version", &health.version);
    }
    println!();

    if health.is_healthy() {
        print_success("Loan service is ready");
    } else {
        print_warning(&format!("Loan service reports '{}'", health.status));
    }
    println!();
    Ok(())
}

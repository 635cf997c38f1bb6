use tracing::debug;

use crate::domain::error::Result;
use crate::domain::sheet::{export_url, SheetTable};
use crate::infrastructure::csv::tabulate;
use crate::infrastructure::sheets::SheetsClient;

/// Resolves a sheet reference to its CSV export and reshapes the
/// payload into columns plus row records.
pub struct SheetDataUseCase {
    client: SheetsClient,
}

impl SheetDataUseCase {
    pub fn new(client: SheetsClient) -> Self {
        Self { client }
    }

    pub async fn execute(&self, reference: &str) -> Result<SheetTable> {
        let csv_url = export_url(reference);
        debug!(url = %csv_url, "Fetching sheet export");

        let body = self.client.fetch_csv(&csv_url).await?;
        tabulate(&body)
    }
}

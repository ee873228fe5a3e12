use crate::domain::Listing;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

pub fn export_listings_xlsx(listings: &[Listing]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = [
        "Project",
        "City",
        "Locality",
        "BHK",
        "Price (INR)",
        "Status",
        "Slug",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &listing.name)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write project name: {}", e)))?;

        worksheet
            .write_string(r, 1, &listing.city)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write city: {}", e)))?;

        let locality = listing.locality.as_deref().unwrap_or("");
        worksheet
            .write_string(r, 2, locality)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write locality: {}", e)))?;

        worksheet
            .write_string(r, 3, &listing.bhk_label)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write BHK: {}", e)))?;

        match listing.price_inr {
            Some(price) => worksheet
                .write_number(r, 4, price as f64)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?,
            None => worksheet
                .write_string(r, 4, "")
                .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?,
        };

        worksheet
            .write_string(r, 5, &listing.status.display())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write status: {}", e)))?;

        worksheet
            .write_string(r, 6, &listing.slug)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write slug: {}", e)))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))?;

    xlsx_response(buffer, "property_search_results.xlsx")
}

//! CSV export with browser-side download.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be flattened into a CSV report.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Serialize `data` (the currently filtered record set) and trigger a
/// download named `filename`.
pub fn export_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nenhum dado encontrado para exportar.".to_string());
    }

    let mut content = String::new();
    // UTF-8 BOM so Excel picks up the accented characters.
    content.push('\u{FEFF}');
    content.push_str(&T::headers().join(","));
    content.push('\n');
    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        content.push_str(&row.join(","));
        content.push('\n');
    }

    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)
}

/// Quote a cell when it carries the separator, quotes or newlines.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_cells_pass_through() {
        assert_eq!(escape_csv_cell("Ana Silva"), "Ana Silva");
    }

    #[test]
    fn separator_and_quotes_get_escaped() {
        assert_eq!(escape_csv_cell("Silva, Ana"), "\"Silva, Ana\"");
        assert_eq!(escape_csv_cell("dita \"a chefe\""), "\"dita \"\"a chefe\"\"\"");
    }
}

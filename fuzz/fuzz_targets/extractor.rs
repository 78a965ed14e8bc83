#![no_main]

use libfuzzer_sys::fuzz_target;
use reqwest::StatusCode;
use url::Url;

use seo_audit::analysis::build_report;
use seo_audit::fetcher::FetchError;
use seo_audit::fetcher::pipeline::process_response;

fuzz_target!(|data: &[u8]| {
    let Ok(page_url) = Url::parse("https://example.com/") else {
        return;
    };

    // Arbitrary bytes go through charset detection first, as a fetched body would
    let page = process_response(
        page_url.clone(),
        StatusCode::OK,
        None,
        bytes::Bytes::copy_from_slice(data),
        std::time::Duration::ZERO,
    );

    let missing = FetchError::Http {
        status: StatusCode::NOT_FOUND,
    };
    let report = build_report(&page_url, &page.body_utf8, Err(&missing));
    assert!(report.score <= 100);
    assert!(report.signals.images_with_alt <= report.signals.total_images);

    let report = build_report(&page_url, "<title>t</title>", Ok(&page.body_utf8));
    assert!(report.score <= 100);
});

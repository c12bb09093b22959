//! Shared fixtures and helpers for the htmldiff test suite

use std::sync::Once;

use kodegen_tools_htmldiff::RowMatrix;

static TRACING: Once = Once::new();

/// Route engine logs to the test output, filtered by `RUST_LOG`
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build a row matrix from string literals
#[allow(dead_code)]
pub fn matrix(rows: &[&[&str]]) -> RowMatrix {
    rows.iter()
        .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
        .collect()
}

/// Old side of a typical editor revision: a styled four-row table
#[allow(dead_code)]
pub const OLD_DOCUMENT: &str = r#"<table class="table table-striped" style="width: 100%; background-color: #ff0000;">
  <tbody>
    <tr>
      <td>Laws</td>
      <th>Followed By them (true or false)</th>
      <td>teeny tiny column</td>
    </tr>
    <tr>
      <td>Employee Welfare schemes</td>
      <td>true</td>
      <td>test</td>
    </tr>
    <tr>
      <td>Insurance</td>
      <td>false</td>
      <td></td>
    </tr>
    <tr>
      <td>Security</td>
      <td>false</td>
      <td>test</td>
    </tr>
  </tbody>
</table>"#;

/// New side: a leading paragraph and a replaced three-row table
#[allow(dead_code)]
pub const NEW_DOCUMENT: &str = r#"<p>hello I am a paragraph</p><table style="width: 100%;">
<tbody>
<tr>
<td>Column1</td>
<td>Column2</td>
<td>Column3</td>
</tr>
<tr>
<td>r1c1</td>
<td>r1c2</td>
<td>r1c3</td>
</tr>
<tr>
<td>r2c1</td>
<td>r2c2</td>
<td>r2c3</td>
</tr>
</tbody>
</table>"#;

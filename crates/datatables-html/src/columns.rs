//! Canned row index, action and checkbox columns.

use datatables_params::ConfigMap;

use crate::column::Column;

pub const INDEX_COLUMN: &str = "DT_RowIndex";

/// The row index column, bound to `DT_RowIndex`.
pub fn index_column(options: ConfigMap) -> Column {
    let mut column = Column::make(INDEX_COLUMN)
        .title("")
        .default_content("")
        .orderable(false)
        .searchable(false)
        .exportable(false)
        .printable(true);
    column.apply_options(options);
    column
}

/// The action column, bound to `action`.
pub fn action_column(options: ConfigMap) -> Column {
    let mut column = Column::make("action")
        .title("Action")
        .default_content("")
        .orderable(false)
        .searchable(false)
        .exportable(false)
        .printable(true);
    column.apply_options(options);
    column
}

/// The select-all checkbox column.
pub fn checkbox_column(options: ConfigMap) -> Column {
    let mut column = Column::make("checkbox")
        .title(r#"<input type="checkbox" id="dataTablesCheckbox"/>"#)
        .default_content(r#"<input type="checkbox"/>"#)
        .width("10px")
        .orderable(false)
        .searchable(false)
        .exportable(false)
        .printable(true);
    column.apply_options(options);
    column
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn index_defaults() {
        assert_eq!(
            index_column(ConfigMap::new()).to_node(),
            json!({
                "data": "DT_RowIndex",
                "name": "DT_RowIndex",
                "title": "",
                "orderable": false,
                "searchable": false,
                "exportable": false,
                "printable": true,
                "footer": "",
                "defaultContent": ""
            })
        );
    }

    #[test]
    fn action_overrides() {
        let serde_json::Value::Object(options) = json!({"title": "Tools", "width": "80px"}) else {
            unreachable!()
        };
        let column = action_column(options);
        assert_eq!(column.title, "Tools");
        assert_eq!(column.width.as_deref(), Some("80px"));
        assert_eq!(column.data, "action");
        assert!(!column.searchable);
    }

    #[test]
    fn checkbox_markup() {
        let column = checkbox_column(ConfigMap::new());
        assert_eq!(
            column.header_cell(),
            r#"<th width="10px"><input type="checkbox" id="dataTablesCheckbox"/></th>"#
        );
        assert_eq!(
            column.default_content.as_deref(),
            Some(r#"<input type="checkbox"/>"#)
        );
    }
}

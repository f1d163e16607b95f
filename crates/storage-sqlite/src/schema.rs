diesel::table! {
    app_data (data_key) {
        data_key -> Text,
        data_value -> Text,
    }
}

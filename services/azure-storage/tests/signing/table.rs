use pretty_assertions::assert_eq;
use storsign_azure_storage::{
    canonicalize_resource, shared_key, string_to_sign, AuthVariant,
};

use super::{credential, example_headers, headers, DATE, URL};

#[test]
fn test_shared_key_lite_for_table_example() {
    let resource = canonicalize_resource(URL, "acct", AuthVariant::SharedKeyLiteForTable).unwrap();
    assert_eq!(resource, "/acct/container/blob?comp=metadata");

    assert_eq!(
        string_to_sign(
            "GET",
            &example_headers(),
            &resource,
            AuthVariant::SharedKeyLiteForTable
        )
        .unwrap(),
        "Tue, 01 Jan 2019 00:00:00 GMT\n/acct/container/blob?comp=metadata"
    );

    assert_eq!(
        shared_key(
            "GET",
            URL,
            &example_headers(),
            AuthVariant::SharedKeyLiteForTable,
            &credential("acct-secondary")
        )
        .unwrap(),
        "SharedKeyLite acct:PECDCSzwlNS2Vc2AOjEKPWzMts2+kNReuHycy+JmnNE="
    );
}

#[test]
fn test_shared_key_for_table_insert_entity() {
    let h = headers(&[
        ("Content-Type", "application/json"),
        ("Content-Length", "42"),
        ("x-ms-date", DATE),
        ("x-ms-version", "2018-03-28"),
        ("DataServiceVersion", "3.0;NetFx"),
    ]);

    assert_eq!(
        string_to_sign("POST", &h, "/acct/mytable", AuthVariant::SharedKeyForTable).unwrap(),
        format!("POST\n\napplication/json\n{DATE}\n/acct/mytable")
    );

    assert_eq!(
        shared_key(
            "POST",
            "https://acct.table.example/mytable?timeout=30",
            &h,
            AuthVariant::SharedKeyForTable,
            &credential("acct")
        )
        .unwrap(),
        "SharedKey acct:oP1Net90Dy6hn9woQ23C+4wkfS4Jtw1WRdtqPiG5LFU="
    );
}

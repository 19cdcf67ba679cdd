use english_study_bot::db::models::NewProduct;
use english_study_bot::db::Database;

async fn test_db() -> anyhow::Result<(tempfile::TempDir, Database)> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite:{}", dir.path().join("products.db").display());
    let db = Database::connect(&url).await?;
    db.run_migrations().await?;
    Ok((dir, db))
}

#[tokio::test]
async fn product_round_trip() -> anyhow::Result<()> {
    let (_dir, db) = test_db().await?;

    let created = db
        .create_product(&NewProduct {
            name: "Beginner Grammar".to_string(),
            description: Some("A1 grammar workbook".to_string()),
            price: Some(9.99),
            image: Some("AgACAgIAAxkBAAIB".to_string()),
            barcode: Some("4600000000017".to_string()),
        })
        .await?;
    assert_eq!(created.name, "Beginner Grammar");

    let by_id = db.get_product(created.id).await?.unwrap();
    assert_eq!(by_id.barcode.as_deref(), Some("4600000000017"));

    let by_barcode = db.get_product_by_barcode("4600000000017").await?.unwrap();
    assert_eq!(by_barcode.id, created.id);

    assert!(db.get_product_by_barcode("0000000000000").await?.is_none());

    let all = db.list_products(10).await?;
    assert_eq!(all.len(), 1);

    Ok(())
}

#[tokio::test]
async fn migrations_are_idempotent() -> anyhow::Result<()> {
    let (_dir, db) = test_db().await?;
    db.run_migrations().await?;

    db.create_product(&NewProduct {
        name: "Phonetics Poster".to_string(),
        description: None,
        price: None,
        image: None,
        barcode: None,
    })
    .await?;

    assert_eq!(db.list_products(10).await?.len(), 1);
    Ok(())
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingSpot::Table)
                    .if_not_exists()
                    .col(pk_uuid(ParkingSpot::Id))
                    .col(string_len_uniq(ParkingSpot::ParkingSpotNumber, 10))
                    .col(string_len_uniq(ParkingSpot::LicensePlateCar, 7))
                    .col(string_len(ParkingSpot::BrandCar, 70))
                    .col(string_len(ParkingSpot::ModelCar, 70))
                    .col(string_len(ParkingSpot::ColorCar, 70))
                    .col(timestamp_with_time_zone(ParkingSpot::RegistrationDate))
                    .col(string_len(ParkingSpot::ResponsibleName, 130))
                    .col(string_len(ParkingSpot::Apartment, 30))
                    .col(string_len(ParkingSpot::Block, 30))
                    .to_owned(),
            )
            .await?;

        // One parking spot per apartment and block
        manager
            .create_index(
                Index::create()
                    .name("idx-parking_spot-apartment-block")
                    .table(ParkingSpot::Table)
                    .col(ParkingSpot::Apartment)
                    .col(ParkingSpot::Block)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingSpot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ParkingSpot {
    Table,
    Id,
    ParkingSpotNumber,
    LicensePlateCar,
    BrandCar,
    ModelCar,
    ColorCar,
    RegistrationDate,
    ResponsibleName,
    Apartment,
    Block,
}

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    pagination::{PageRequest, SortDirection, SortField},
    parking_spot::ParkingSpot,
};

pub struct ParkingSpotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParkingSpotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether any parking spot is registered for the license plate.
    pub async fn exists_by_license_plate_car(&self, license_plate_car: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::LicensePlateCar.eq(license_plate_car))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the parking spot number is already taken.
    pub async fn exists_by_parking_spot_number(
        &self,
        parking_spot_number: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::ParkingSpotNumber.eq(parking_spot_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a parking spot is already registered for the apartment and block pair.
    pub async fn exists_by_apartment_and_block(
        &self,
        apartment: &str,
        block: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::Apartment.eq(apartment))
            .filter(entity::parking_spot::Column::Block.eq(block))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts the parking spot, or replaces every mutable column when the id already exists.
    ///
    /// `registration_date` is only written on insert. Unique index violations on the other
    /// columns are returned as `DbErr` for the caller to translate.
    ///
    /// # Arguments
    /// - `spot` - Parking spot to persist
    ///
    /// # Returns
    /// - `Ok(ParkingSpot)` - The stored row
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn save(&self, spot: ParkingSpot) -> Result<ParkingSpot, DbErr> {
        let model = entity::prelude::ParkingSpot::insert(entity::parking_spot::ActiveModel {
            id: ActiveValue::Set(spot.id),
            parking_spot_number: ActiveValue::Set(spot.parking_spot_number),
            license_plate_car: ActiveValue::Set(spot.license_plate_car),
            brand_car: ActiveValue::Set(spot.brand_car),
            model_car: ActiveValue::Set(spot.model_car),
            color_car: ActiveValue::Set(spot.color_car),
            registration_date: ActiveValue::Set(spot.registration_date),
            responsible_name: ActiveValue::Set(spot.responsible_name),
            apartment: ActiveValue::Set(spot.apartment),
            block: ActiveValue::Set(spot.block),
        })
        .on_conflict(
            OnConflict::column(entity::parking_spot::Column::Id)
                .update_columns([
                    entity::parking_spot::Column::ParkingSpotNumber,
                    entity::parking_spot::Column::LicensePlateCar,
                    entity::parking_spot::Column::BrandCar,
                    entity::parking_spot::Column::ModelCar,
                    entity::parking_spot::Column::ColorCar,
                    entity::parking_spot::Column::ResponsibleName,
                    entity::parking_spot::Column::Apartment,
                    entity::parking_spot::Column::Block,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(ParkingSpot::from_entity(model))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ParkingSpot>, DbErr> {
        let model = entity::prelude::ParkingSpot::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(model.map(ParkingSpot::from_entity))
    }

    /// Gets one page of parking spots in the requested order.
    ///
    /// Ties on the sort column are broken by id descending so paging is stable.
    ///
    /// # Arguments
    /// - `request` - Page number, page size and ordering
    ///
    /// # Returns
    /// - `Ok((Vec<ParkingSpot>, u64))` - Items on the page and the total item count
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(&self, request: &PageRequest) -> Result<(Vec<ParkingSpot>, u64), DbErr> {
        let order = match request.sort.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        let mut query = entity::prelude::ParkingSpot::find()
            .order_by(sort_column(request.sort.field), order);
        if request.sort.field != SortField::Id {
            query = query.order_by_desc(entity::parking_spot::Column::Id);
        }

        let paginator = query.paginate(self.db, request.size);

        let total = paginator.num_items().await?;
        let spots = paginator
            .fetch_page(request.page)
            .await?
            .into_iter()
            .map(ParkingSpot::from_entity)
            .collect();

        Ok((spots, total))
    }

    /// Deletes a parking spot by id.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No parking spot with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::ParkingSpot::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn sort_column(field: SortField) -> entity::parking_spot::Column {
    match field {
        SortField::Id => entity::parking_spot::Column::Id,
        SortField::ParkingSpotNumber => entity::parking_spot::Column::ParkingSpotNumber,
        SortField::LicensePlateCar => entity::parking_spot::Column::LicensePlateCar,
        SortField::RegistrationDate => entity::parking_spot::Column::RegistrationDate,
        SortField::ResponsibleName => entity::parking_spot::Column::ResponsibleName,
        SortField::Apartment => entity::parking_spot::Column::Apartment,
        SortField::Block => entity::parking_spot::Column::Block,
    }
}

//! SeaORM entities for database tables

/// RSL table
pub mod rsl {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "rsl")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        pub name: String,

        pub registration_number: Option<String>,

        pub email: Option<String>,

        pub phone_number: Option<String>,

        pub address: Option<String>,

        pub website: Option<String>,

        /// Public path of the stored logo
        pub logo: Option<String>,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Staff table
pub mod staff {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "staff")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        /// Unique
        pub employee_id: String,

        pub first_name: String,

        pub last_name: String,

        /// Unique, stored lower-cased
        pub email: String,

        pub phone_number: Option<String>,

        pub department: String,

        pub position: String,

        pub joining_date: Date,

        /// "Active", "Inactive" or "On Leave"
        pub status: String,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::id::next_id,
    model::moto::{MotoEntities, SaveMotoParam},
    util::pagination::PageRequest,
};

pub struct MotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new moto and returns it with every referenced row
    ///
    /// `data_entrada` defaults to the current time when not provided.
    pub async fn create(&self, param: SaveMotoParam) -> Result<MotoEntities, DbErr> {
        let id = next_id(self.db, entity::moto::Column::Id).await?;

        let moto = entity::moto::ActiveModel {
            id: ActiveValue::Set(id),
            placa: ActiveValue::Set(param.placa),
            chassi: ActiveValue::Set(param.chassi),
            qr_code: ActiveValue::Set(param.qr_code),
            data_entrada: ActiveValue::Set(param.data_entrada.unwrap_or_else(Utc::now)),
            previsao_entrega: ActiveValue::Set(param.previsao_entrega),
            fotos: ActiveValue::Set(encode_fotos(param.fotos)?),
            zona_id: ActiveValue::Set(param.zona_id),
            patio_id: ActiveValue::Set(param.patio_id),
            status_id: ActiveValue::Set(param.status_id),
            observacoes: ActiveValue::Set(param.observacoes),
        }
        .insert(self.db)
        .await?;

        self.with_relations(moto).await
    }

    /// Gets a moto by ID with every referenced row
    pub async fn get_by_id(&self, id: i64) -> Result<Option<MotoEntities>, DbErr> {
        match entity::prelude::Moto::find_by_id(id).one(self.db).await? {
            Some(moto) => Ok(Some(self.with_relations(moto).await?)),
            None => Ok(None),
        }
    }

    /// Gets one page of motos ordered by id, optionally filtered by a placa fragment
    ///
    /// The filter is matched as a literal substring against the stored placa, which is
    /// always uppercase; callers pass an uppercased fragment.
    pub async fn get_paginated(
        &self,
        request: PageRequest,
        placa: Option<&str>,
    ) -> Result<(Vec<MotoEntities>, u64), DbErr> {
        let mut query = entity::prelude::Moto::find().order_by_asc(entity::moto::Column::Id);

        if let Some(placa) = placa {
            query = query.filter(entity::moto::Column::Placa.like(contains_pattern(placa)));
        }

        let paginator = query.paginate(self.db, request.page_size);

        let total = paginator.num_items().await?;
        if !request.selects_rows(total) {
            return Ok((Vec::new(), total));
        }

        let motos = paginator.fetch_page(request.index()).await?;

        Ok((self.load_relations(motos).await?, total))
    }

    /// Replaces every updatable field of a moto
    ///
    /// `data_entrada` keeps its stored value when not provided.
    pub async fn update(&self, id: i64, param: SaveMotoParam) -> Result<MotoEntities, DbErr> {
        let moto = entity::prelude::Moto::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Moto with id {} not found",
                id
            )))?;

        let mut active_model: entity::moto::ActiveModel = moto.into();
        active_model.placa = ActiveValue::Set(param.placa);
        active_model.chassi = ActiveValue::Set(param.chassi);
        active_model.qr_code = ActiveValue::Set(param.qr_code);
        if let Some(data_entrada) = param.data_entrada {
            active_model.data_entrada = ActiveValue::Set(data_entrada);
        }
        active_model.previsao_entrega = ActiveValue::Set(param.previsao_entrega);
        active_model.fotos = ActiveValue::Set(encode_fotos(param.fotos)?);
        active_model.zona_id = ActiveValue::Set(param.zona_id);
        active_model.patio_id = ActiveValue::Set(param.patio_id);
        active_model.status_id = ActiveValue::Set(param.status_id);
        active_model.observacoes = ActiveValue::Set(param.observacoes);

        let moto = active_model.update(self.db).await?;

        self.with_relations(moto).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::Moto::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn exists(&self, id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Moto::find()
            .filter(entity::moto::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a placa is used by any moto other than `exclude_id`
    pub async fn placa_taken(&self, placa: &str, exclude_id: Option<i64>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Moto::find().filter(entity::moto::Column::Placa.eq(placa));

        if let Some(id) = exclude_id {
            query = query.filter(entity::moto::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether a chassi is used by any moto other than `exclude_id`
    pub async fn chassi_taken(&self, chassi: &str, exclude_id: Option<i64>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Moto::find().filter(entity::moto::Column::Chassi.eq(chassi));

        if let Some(id) = exclude_id {
            query = query.filter(entity::moto::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    async fn with_relations(&self, moto: entity::moto::Model) -> Result<MotoEntities, DbErr> {
        let id = moto.id;

        self.load_relations(vec![moto])
            .await?
            .into_iter()
            .next()
            .ok_or(DbErr::RecordNotFound(format!(
                "Moto with id {} not found",
                id
            )))
    }

    /// Loads the zona, patio, status and status grupo of every moto
    ///
    /// Issues one query per related table regardless of the number of motos.
    async fn load_relations(
        &self,
        motos: Vec<entity::moto::Model>,
    ) -> Result<Vec<MotoEntities>, DbErr> {
        if motos.is_empty() {
            return Ok(Vec::new());
        }

        let zona_ids: Vec<i64> = motos.iter().map(|m| m.zona_id).collect();
        let zonas: HashMap<i64, entity::zona::Model> = entity::prelude::Zona::find()
            .filter(entity::zona::Column::Id.is_in(zona_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|z| (z.id, z))
            .collect();

        let patio_ids: Vec<i64> = motos.iter().map(|m| m.patio_id).collect();
        let patios: HashMap<i64, entity::patio::Model> = entity::prelude::Patio::find()
            .filter(entity::patio::Column::Id.is_in(patio_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let status_ids: Vec<i64> = motos.iter().map(|m| m.status_id).collect();
        let statuses: HashMap<i64, entity::status::Model> = entity::prelude::Status::find()
            .filter(entity::status::Column::Id.is_in(status_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let grupo_ids: Vec<i64> = statuses.values().map(|s| s.status_grupo_id).collect();
        let grupos: HashMap<i64, entity::status_grupo::Model> =
            entity::prelude::StatusGrupo::find()
                .filter(entity::status_grupo::Column::Id.is_in(grupo_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|g| (g.id, g))
                .collect();

        motos
            .into_iter()
            .map(|moto| {
                let zona = lookup(&zonas, moto.zona_id, "Zona", moto.id)?;
                let patio = lookup(&patios, moto.patio_id, "Patio", moto.id)?;
                let status = lookup(&statuses, moto.status_id, "Status", moto.id)?;
                let status_grupo =
                    lookup(&grupos, status.status_grupo_id, "Status grupo", moto.id)?;

                Ok(MotoEntities {
                    moto,
                    zona,
                    patio,
                    status,
                    status_grupo,
                })
            })
            .collect()
    }
}

fn lookup<M: Clone>(
    rows: &HashMap<i64, M>,
    id: i64,
    kind: &str,
    moto_id: i64,
) -> Result<M, DbErr> {
    rows.get(&id).cloned().ok_or(DbErr::RecordNotFound(format!(
        "{} with id {} referenced by moto {} not found",
        kind, id, moto_id
    )))
}

/// `LIKE` pattern matching `fragment` anywhere, with `%`, `_` and `\\` taken literally.
fn contains_pattern(fragment: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

fn encode_fotos(fotos: Option<Vec<String>>) -> Result<Option<String>, DbErr> {
    fotos
        .map(|fotos| serde_json::to_string(&fotos))
        .transpose()
        .map_err(|e| DbErr::Custom(format!("Failed to encode fotos: {}", e)))
}

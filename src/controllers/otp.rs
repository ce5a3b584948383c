use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        otp::{
            OtpGeneratorRequest, OtpGeneratorResponse, OtpService, OtpServiceApi,
            OtpValidateParams, OtpValidatorResponse,
        },
        shared::ResponseWrapper,
    },
    error::{AppError, AppResult, ResultExt},
    infrastructure::http::ValidatedEnvelope,
};

pub struct OtpController {
    otp_service: Arc<OtpService>,
}

impl OtpController {
    pub fn new(otp_service: Arc<OtpService>) -> Self {
        Self { otp_service }
    }

    /// POST /v1/otpmanager/otp/generate - Generate an OTP for a key
    pub async fn generate(
        State(controller): State<Arc<OtpController>>,
        ValidatedEnvelope { context, request }: ValidatedEnvelope<OtpGeneratorRequest>,
    ) -> AppResult<Json<ResponseWrapper<OtpGeneratorResponse>>> {
        let response = controller
            .otp_service
            .generate(request)
            .await
            .in_context(&context)?;

        Ok(Json(
            ResponseWrapper::for_context(Some(&context)).with_response(response),
        ))
    }

    /// GET /v1/otpmanager/otp/validate - Check an OTP against its key
    pub async fn validate(
        State(controller): State<Arc<OtpController>>,
        query: Result<Query<OtpValidateParams>, QueryRejection>,
    ) -> AppResult<Json<ResponseWrapper<OtpValidatorResponse>>> {
        let Query(params) = query.map_err(AppError::from)?;

        let response = controller
            .otp_service
            .validate(params)
            .await
            .map_err(AppError::from)?;

        Ok(Json(ResponseWrapper::for_context(None).with_response(response)))
    }
}

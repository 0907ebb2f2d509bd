// Typed endpoint surface over the backend's REST routes

use crate::client::{ApiClient, ClientError};
use cliniq_contracts::{
    Appointment, AuthData, CreateDoctorRequest, CreatePatientRequest, Doctor, LoginRequest,
    Patient, RegisterRequest, UpdateDoctorRequest, UpdatePatientRequest,
};

impl ApiClient {
    // Auth

    pub async fn register_user(&self, request: &RegisterRequest) -> Result<AuthData, ClientError> {
        self.post("/api/auth/register", request).await
    }

    pub async fn login_user(&self, request: &LoginRequest) -> Result<AuthData, ClientError> {
        self.post("/api/auth/login", request).await
    }

    // Doctors

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, ClientError> {
        self.get("/api/doctor/").await
    }

    pub async fn get_doctor(&self, id: &str) -> Result<Doctor, ClientError> {
        self.get(&format!("/api/doctor/{}", id)).await
    }

    pub async fn create_doctor(&self, request: &CreateDoctorRequest) -> Result<Doctor, ClientError> {
        self.post("/api/doctor/", request).await
    }

    pub async fn update_doctor(
        &self,
        id: &str,
        request: &UpdateDoctorRequest,
    ) -> Result<Doctor, ClientError> {
        self.put(&format!("/api/doctor/{}", id), request).await
    }

    pub async fn delete_doctor(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/api/doctor/{}", id)).await
    }

    // Patients

    pub async fn list_patients(&self) -> Result<Vec<Patient>, ClientError> {
        self.get("/api/patient/").await
    }

    pub async fn get_patient(&self, id: &str) -> Result<Patient, ClientError> {
        self.get(&format!("/api/patient/{}", id)).await
    }

    pub async fn create_patient(
        &self,
        request: &CreatePatientRequest,
    ) -> Result<Patient, ClientError> {
        self.post("/api/patient/", request).await
    }

    pub async fn update_patient(
        &self,
        id: &str,
        request: &UpdatePatientRequest,
    ) -> Result<Patient, ClientError> {
        self.put(&format!("/api/patient/{}", id), request).await
    }

    pub async fn delete_patient(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/api/patient/{}", id)).await
    }

    // Appointments

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ClientError> {
        self.get("/api/appointment/").await
    }
}

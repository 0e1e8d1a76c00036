mod report_dto;

pub use report_dto::{
    GetReportResponseDto, ObservationTimeResponseDto, SetReportRequestDto, SetReportResponseDto,
};

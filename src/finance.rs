/// 재무 계산 오류를 표현한다.
#[derive(Debug, PartialEq, Eq)]
pub enum FinanceError {
    /// 상환 기간이 0년이라 연할부금을 계산할 수 없는 경우
    ZeroDuration,
    /// 이자율이 허용 범위 [0, 1) 밖인 경우
    InvalidRate(&'static str),
}

impl std::fmt::Display for FinanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinanceError::ZeroDuration => {
                write!(f, "상환 기간이 0년입니다. 연할부금을 계산할 수 없습니다.")
            }
            FinanceError::InvalidRate(msg) => write!(f, "이자율 오류: {msg}"),
        }
    }
}

impl std::error::Error for FinanceError {}

/// 현재가치 배수(할인계수 합)를 계산한다.
///
/// sum over i in [0, yrs) of 1 / (1+r)^i. yrs=0이면 0을 반환하므로
/// 나눗셈에 사용하는 쪽은 [`annualize`]를 거쳐야 한다.
pub fn npv(yrs: u32, r: f64) -> f64 {
    let mut tot = 0.0;
    for i in 0..yrs {
        tot += 1.0 / (1.0 + r).powi(i as i32);
    }
    tot
}

/// 일시 투자비(CAPEX)를 연 단위 상환액으로 환산한다. [USD/yr]
///
/// yrs=0은 0으로 나누기가 되므로 오류로 처리한다.
pub fn annualize(capex: f64, yrs: u32, r: f64) -> Result<f64, FinanceError> {
    if yrs == 0 {
        return Err(FinanceError::ZeroDuration);
    }
    if !(0.0..1.0).contains(&r) {
        return Err(FinanceError::InvalidRate("이자율은 0 이상 1 미만이어야 합니다."));
    }
    Ok(capex / npv(yrs, r))
}

/// 자본회수계수의 역수(present value factor)를 계산한다.
///
/// ((1+r)^n - 1) / ((1+r)^n * r). 수소 모델의 LCOE/LCOH 환산에 사용한다.
/// r=0이면 0으로 나누기가 되므로 오류로 처리한다.
pub fn pvf(r: f64, lifetime: f64) -> Result<f64, FinanceError> {
    if r <= 0.0 || r >= 1.0 {
        return Err(FinanceError::InvalidRate("이자율은 0 초과 1 미만이어야 합니다."));
    }
    let growth = (1.0 + r).powf(lifetime);
    Ok((growth - 1.0) / (growth * r))
}

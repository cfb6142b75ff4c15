use ndarray::ArrayView2;

pub trait LossFn {
    fn loss(&self, y_pred: ArrayView2<f64>, y: ArrayView2<f64>) -> f64;
}
